use thiserror::Error;

/// Things which can go wrong while creating and driving the GLFW window.
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Failed to initialize GLFW")]
    UnableToInitGLFW(#[from] glfw::InitError),

    #[error("The GLFW Window could not be created")]
    WindowCreateFailed,

    #[error("The Window's event reciever has already been taken")]
    EventReceiverLost,

    #[error("The OpenGL context does not provide {}", .0)]
    MissingGlFunction(&'static str),
}
