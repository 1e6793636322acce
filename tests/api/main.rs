mod helpers;
mod trigger;
