mod common;
mod routing;
mod verify;
