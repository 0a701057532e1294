pub mod screens;
