pub mod synthetic_field;
