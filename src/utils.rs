pub mod errorfmt;
