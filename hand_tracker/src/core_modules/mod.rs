pub mod bridge;
pub mod draw;
pub mod fps;
pub mod frame;
pub mod keys;
pub mod landmark;
pub mod landmarker;
