use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use log::{debug, error};

use super::image::CHANNELS_PER_PIXEL;
use super::{CodecOptions, Persist};
use crate::error::StegoError;
use crate::result::Result;

/// A `width` x `height` grid of RGBA samples, row-major and contiguous.
///
/// The raw byte length is always `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    image: RgbaImage,
}

impl PixelBuffer {
    /// a fully transparent black buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// wraps raw RGBA bytes, fails if the length does not match the dimensions
    pub fn from_raw(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS_PER_PIXEL;
        let given = rgba.len();

        RgbaImage::from_raw(width, height, rgba)
            .filter(|_| given == expected)
            .map(|image| Self { image })
            .ok_or(StegoError::InvalidBufferLength {
                width,
                height,
                expected,
                given,
            })
    }

    /// decodes an image file as is, without any resizing, as needed for unveiling
    pub fn open(file: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(file.as_ref()).map_err(StegoError::ImageLoadError)?;

        Ok(Self::from(image))
    }

    /// decodes an image file as carrier, downscaling it according to `options`
    pub fn from_file(file: impl AsRef<Path>, options: &CodecOptions) -> Result<Self> {
        let image = image::open(file.as_ref()).map_err(StegoError::ImageLoadError)?;

        Ok(Self::from_dynamic_image(image, options))
    }

    /// decodes an in-memory image as carrier, downscaling it according to `options`
    pub fn from_memory(data: &[u8], options: &CodecOptions) -> Result<Self> {
        let image = image::load_from_memory(data).map_err(StegoError::ImageLoadError)?;

        Ok(Self::from_dynamic_image(image, options))
    }

    fn from_dynamic_image(image: DynamicImage, options: &CodecOptions) -> Self {
        match options.max_dimension {
            Some(max) if image.width() > max || image.height() > max => {
                let (width, height) = image.dimensions();
                let resized = image.resize(max, max, options.resize_filter);
                debug!(
                    "Downscaled carrier from {width}x{height} to {}x{}",
                    resized.width(),
                    resized.height()
                );
                Self::from(resized)
            }
            _ => Self::from(image),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// number of pixels, `width * height`
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_mut_raw(&mut self) -> &mut [u8] {
        &mut self.image
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// encodes the buffer losslessly as PNG into `writer`
    pub fn write_png<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        self.image.write_to(writer, ImageFormat::Png).map_err(|e| {
            error!("Error encoding carrier as PNG: {e}");
            StegoError::ImageEncodingError
        })
    }

    /// encodes the buffer losslessly as PNG into memory
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut png = Cursor::new(Vec::new());
        self.write_png(&mut png)?;

        Ok(png.into_inner())
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl From<DynamicImage> for PixelBuffer {
    fn from(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgba8(),
        }
    }
}

impl Persist for PixelBuffer {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.write_png(&mut writer)?;
        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}
