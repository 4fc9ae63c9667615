pub use image::imageops::FilterType;

/// Options applied when a carrier image is prepared for hiding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecOptions {
    /// Carriers whose width or height exceeds this bound are downscaled to fit,
    /// keeping the aspect ratio. `None` keeps the carrier at its original size.
    ///
    /// Note this number influences the capacity directly.
    pub max_dimension: Option<u32>,

    /// The filter used when downscaling a carrier.
    pub resize_filter: FilterType,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_dimension: None,
            resize_filter: FilterType::Lanczos3,
        }
    }
}

impl CodecOptions {
    pub fn with_max_dimension(mut self, max_dimension: Option<u32>) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    pub fn with_resize_filter(mut self, resize_filter: FilterType) -> Self {
        self.resize_filter = resize_filter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_carriers_at_their_size_by_default() {
        let options = CodecOptions::default();

        assert_eq!(options.max_dimension, None);
        assert_eq!(options.resize_filter, FilterType::Lanczos3);
    }

    #[test]
    fn should_chain_the_builder_methods() {
        let options = CodecOptions::default()
            .with_max_dimension(Some(1024))
            .with_resize_filter(FilterType::Nearest);

        assert_eq!(options.max_dimension, Some(1024));
        assert_eq!(options.resize_filter, FilterType::Nearest);
    }
}
