use {
  super::*,
  crate::error::ErrorKind
};

#[test] fn integer_means_round_and_saturate() {
  assert_eq!(u8::from_mean(10.4), 10);
  assert_eq!(u8::from_mean(10.5), 11);
  assert_eq!(u8::from_mean(300.0), 255);
  assert_eq!(u8::from_mean(-3.0), 0);
  assert_eq!(u16::from_mean(65535.7), 65535);
}

#[test] fn float_means_are_kept() {
  assert_eq!(f32::from_mean(0.25), 0.25);
  assert_eq!(f64::from_mean(1.0 / 3.0), 1.0 / 3.0);
  assert_eq!(200u8.widen(), 200.0);
}

#[test] fn shape_is_validated() {
  let err = Raster::new(2, 2, 3, vec![0u8; 11]).unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
  let err = Raster::<u8>::new(0, 2, 1, vec![]).unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
  let err = Raster::<u8>::new(1, 1, 0, vec![]).unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
}

#[test] fn from_fn_rejects_wrong_pixel_width() {
  let err = Raster::from_fn(3, 2, 3, |y, x| if (y, x) == (1, 0) { vec![0u8; 2] } else { vec![0u8; 3] })
    .unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::InvalidInput(msg) if msg.contains("(1, 0)")), "{err}");
  let err = Raster::from_fn(2, 2, 1, |_, _| vec![1u8, 2]).unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
  let err = Raster::<u8>::from_fn(2, 2, 1, |_, _| vec![]).unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::InvalidInput(_)));
}

#[test] fn pixels_are_row_major() -> crate::error::Result<()> {
  let raster = Raster::from_fn(3, 2, 2, |y, x| vec![y as u8, x as u8])?;
  assert_eq!(raster.pixel(1, 2), &[1, 2]);
  assert_eq!(raster.pixels().count(), 6);
  assert_eq!(raster.as_slice()[..4], [0, 0, 0, 1]);
  let domain = raster.domain()?;
  assert_eq!((domain.width(), domain.height()), (3.0, 2.0));
  Ok(())
}

#[cfg(feature = "image")]
#[test] fn dynamic_image_round_trip() -> crate::error::Result<()> {
  let image = image::DynamicImage::ImageRgb8(
    image::RgbImage::from_fn(4, 3, |x, y| image::Rgb([x as u8, y as u8, 7]))
  );
  let raster = Raster::<u8>::from(image);
  assert_eq!((raster.width(), raster.height(), raster.channels()), (4, 3, 3));
  assert_eq!(raster.pixel(2, 3), &[3, 2, 7]);
  let image = raster.into_dynamic()?;
  assert_eq!(image.to_rgb8().get_pixel(3, 2).0, [3, 2, 7]);
  Ok(())
}
