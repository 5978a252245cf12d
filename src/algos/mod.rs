pub mod caesar;
pub mod frequency;
pub mod pigpen;
