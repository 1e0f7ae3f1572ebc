pub mod u101_contact_intake;
