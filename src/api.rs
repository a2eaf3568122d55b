pub mod flick;
