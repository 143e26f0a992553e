//! Tools around the token ring simulation in [`lansim_core`]: a description
//! language for rings, the prebuilt example network and the command line
//! interface.

pub mod cli;
pub mod rdl;
pub mod simulations;
