// common helpers 
pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod function; 
pub mod interval; 
pub mod report; 
pub(crate) mod signs; 
pub(crate) mod tolerances; 

// isolation 
pub mod separation; 

// algorithms 
pub mod bisection;
pub mod newton;
pub mod secant;

// runs every refiner over every bracket 
pub mod survey; 
