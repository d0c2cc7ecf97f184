/// Main error type for the library.
///
/// The colormap itself never fails; errors only come from the edges:
/// reading depth images, loading configuration and checking grid shapes.
#[derive(Debug)]
pub enum DepthVizError {
    /// Used when the user pass a logical invalid parameter to a function.
    InvalidParameter(String),
    Io(std::io::Error),
    Image(image::ImageError),
    Config(serde_json::Error),
}

impl std::fmt::Display for DepthVizError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DepthVizError::InvalidParameter(err) => write!(f, "Parameter error: {}", err),
            DepthVizError::Io(err) => write!(f, "IO error: {}", err),
            DepthVizError::Image(err) => write!(f, "Image error: {}", err),
            DepthVizError::Config(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl DepthVizError {
    /// Create a error with the kind `InvalidParameter`.
    /// # Arguments
    /// * `msg` - The error message.
    pub fn invalid_parameter<T: ToString>(msg: T) -> Self {
        DepthVizError::InvalidParameter(msg.to_string())
    }
}

impl std::error::Error for DepthVizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DepthVizError::InvalidParameter(_) => None,
            DepthVizError::Io(err) => Some(err),
            DepthVizError::Image(err) => Some(err),
            DepthVizError::Config(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DepthVizError {
    fn from(err: std::io::Error) -> Self {
        DepthVizError::Io(err)
    }
}

impl From<image::ImageError> for DepthVizError {
    fn from(err: image::ImageError) -> Self {
        DepthVizError::Image(err)
    }
}

impl From<serde_json::Error> for DepthVizError {
    fn from(err: serde_json::Error) -> Self {
        DepthVizError::Config(err)
    }
}
