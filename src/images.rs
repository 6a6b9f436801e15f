/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::yuv_error::{
    check_chroma_plane, check_luma_plane, MismatchedStrides, YuvError,
};

#[derive(Debug, Clone)]
/// One color channel of a multi-planar image: backing bytes plus geometry.
///
/// All addressing into `data` is absolute, there is no read cursor. Strides
/// are always in bytes.
pub struct YuvImagePlane<'a> {
    pub data: &'a [u8],
    /// Bytes between starts of consecutive rows, may exceed the logical row
    /// width due to padding.
    pub row_stride: u32,
    /// Byte distance between horizontally adjacent samples: 1 for tightly
    /// packed planes, 2 for chroma interleaved with the opposite channel.
    pub pixel_stride: u32,
}

#[derive(Debug, Clone)]
/// Non-mutable representation of a three-plane YUV 4:2:0 camera frame.
///
/// Luma covers the full `width x height` resolution, U and V each hold
/// `width/2 x height/2` logical samples.
pub struct Yuv420MultiPlanarImage<'a> {
    pub y_plane: YuvImagePlane<'a>,
    pub u_plane: YuvImagePlane<'a>,
    pub v_plane: YuvImagePlane<'a>,
    pub width: u32,
    pub height: u32,
}

impl Yuv420MultiPlanarImage<'_> {
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        if self.width == 0 || self.height == 0 {
            return Err(YuvError::ZeroBaseSize);
        }
        if self.width % 2 != 0 || self.height % 2 != 0 {
            return Err(YuvError::OddImageSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.u_plane.row_stride != self.v_plane.row_stride {
            return Err(YuvError::ChromaRowStrideMismatch(MismatchedStrides {
                u_stride: self.u_plane.row_stride,
                v_stride: self.v_plane.row_stride,
            }));
        }
        if self.u_plane.pixel_stride != self.v_plane.pixel_stride {
            return Err(YuvError::ChromaPixelStrideMismatch(MismatchedStrides {
                u_stride: self.u_plane.pixel_stride,
                v_stride: self.v_plane.pixel_stride,
            }));
        }
        check_luma_plane(&self.y_plane, self.width, self.height)?;
        check_chroma_plane(&self.u_plane, self.width, self.height)?;
        check_chroma_plane(&self.v_plane, self.width, self.height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tight_frame(width: u32, height: u32) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let y = vec![0u8; width as usize * height as usize];
        let chroma = vec![0u8; (width as usize / 2) * (height as usize / 2)];
        (y, chroma.clone(), chroma)
    }

    #[test]
    fn accepts_tightly_packed_geometry() {
        let (y, u, v) = tight_frame(64, 48);
        let image = Yuv420MultiPlanarImage {
            y_plane: YuvImagePlane {
                data: &y,
                row_stride: 64,
                pixel_stride: 1,
            },
            u_plane: YuvImagePlane {
                data: &u,
                row_stride: 32,
                pixel_stride: 1,
            },
            v_plane: YuvImagePlane {
                data: &v,
                row_stride: 32,
                pixel_stride: 1,
            },
            width: 64,
            height: 48,
        };
        image.check_constraints().unwrap();
    }

    #[test]
    fn rejects_mismatched_chroma_strides() {
        let (y, u, v) = tight_frame(64, 48);
        let image = Yuv420MultiPlanarImage {
            y_plane: YuvImagePlane {
                data: &y,
                row_stride: 64,
                pixel_stride: 1,
            },
            u_plane: YuvImagePlane {
                data: &u,
                row_stride: 32,
                pixel_stride: 1,
            },
            v_plane: YuvImagePlane {
                data: &v,
                row_stride: 40,
                pixel_stride: 1,
            },
            width: 64,
            height: 48,
        };
        assert!(matches!(
            image.check_constraints(),
            Err(YuvError::ChromaRowStrideMismatch(_))
        ));
    }

    #[test]
    fn rejects_short_luma_plane() {
        let (y, u, v) = tight_frame(64, 48);
        let image = Yuv420MultiPlanarImage {
            y_plane: YuvImagePlane {
                data: &y[..y.len() - 1],
                row_stride: 64,
                pixel_stride: 1,
            },
            u_plane: YuvImagePlane {
                data: &u,
                row_stride: 32,
                pixel_stride: 1,
            },
            v_plane: YuvImagePlane {
                data: &v,
                row_stride: 32,
                pixel_stride: 1,
            },
            width: 64,
            height: 48,
        };
        assert!(matches!(
            image.check_constraints(),
            Err(YuvError::LumaPlaneMinimumSizeMismatch(_))
        ));
    }
}
