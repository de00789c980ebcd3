mod sas;
