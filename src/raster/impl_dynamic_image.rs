use {
  super::Raster,
  crate::error::{Error, Result},
  image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgba}
};

impl From<DynamicImage> for Raster<u8> {
  fn from(image: DynamicImage) -> Self {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let (channels, data) = match image {
      DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
      DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
      DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
      DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
      other if other.color().has_alpha() => (4, other.to_rgba8().into_raw()),
      other => (3, other.to_rgb8().into_raw()),
    };
    Self { width, height, channels, data }
  }
}

impl From<DynamicImage> for Raster<u16> {
  fn from(image: DynamicImage) -> Self {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let (channels, data) = match image {
      DynamicImage::ImageLuma16(buf) => (1, buf.into_raw()),
      DynamicImage::ImageLumaA16(buf) => (2, buf.into_raw()),
      DynamicImage::ImageRgb16(buf) => (3, buf.into_raw()),
      DynamicImage::ImageRgba16(buf) => (4, buf.into_raw()),
      other if other.color().has_alpha() => (4, other.to_rgba16().into_raw()),
      other => (3, other.to_rgb16().into_raw()),
    };
    Self { width, height, channels, data }
  }
}

macro_rules! impl_into_dynamic {
  ($t: ty, $luma: ident, $luma_a: ident, $rgb: ident, $rgba: ident) => {
    impl Raster<$t> {
      pub fn into_dynamic(self) -> Result<DynamicImage> {
        let (w, h) = (self.width as u32, self.height as u32);
        let image = match self.channels {
          1 => ImageBuffer::<Luma<$t>, _>::from_raw(w, h, self.data).map(DynamicImage::$luma),
          2 => ImageBuffer::<LumaA<$t>, _>::from_raw(w, h, self.data).map(DynamicImage::$luma_a),
          3 => ImageBuffer::<Rgb<$t>, _>::from_raw(w, h, self.data).map(DynamicImage::$rgb),
          4 => ImageBuffer::<Rgba<$t>, _>::from_raw(w, h, self.data).map(DynamicImage::$rgba),
          _ => None
        };
        image.ok_or_else(|| Error::invalid_input(format!(
          "{} channels cannot be encoded as an image", self.channels
        )))
      }
    }
  }
}

impl_into_dynamic!(u8, ImageLuma8, ImageLumaA8, ImageRgb8, ImageRgba8);
impl_into_dynamic!(u16, ImageLuma16, ImageLumaA16, ImageRgb16, ImageRgba16);
