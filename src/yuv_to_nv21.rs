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
use crate::images::Yuv420MultiPlanarImage;
use crate::yuv_error::{MismatchedSize, YuvError};
use crate::yuv_support::YuvChromaStorage;

/// Repack a multi-planar 4:2:0 frame into NV21: the full luma plane followed
/// by interleaved V,U byte pairs at half resolution.
///
/// Frame geometry is validated before any byte is copied, there is no
/// unchecked mode. Luma is bulk-copied when its row stride equals the image
/// width and extracted row by row otherwise, skipping trailing padding.
///
/// When `chroma_storage` is [`YuvChromaStorage::Interleaved`] and the V plane
/// reports row stride `width` with pixel stride 2, the V,U interleave is
/// reproduced by seeding the first V sample and bulk-copying the U view,
/// which trails the V view by exactly one byte in the shared backing region.
/// In that shape the V view must hold exactly `width*height/2 - 1` bytes.
/// Any other shape takes the alias-free path addressing each chroma sample
/// absolutely through its own plane geometry.
///
/// # Arguments
///
/// * `image` - Source multi-planar 4:2:0 image.
/// * `chroma_storage` - Producer's statement of the physical chroma layout.
///
/// The output buffer length is always `width*height + width*height/2`.
pub fn yuv420_to_nv21(
    image: &Yuv420MultiPlanarImage,
    chroma_storage: YuvChromaStorage,
) -> Result<Vec<u8>, YuvError> {
    image.check_constraints()?;

    let width = image.width as usize;
    let height = image.height as usize;

    let y_size = width * height;
    let uv_size = y_size / 2;
    let size = y_size + uv_size;
    let mut nv21 = vec![0u8; size];

    let y_plane = &image.y_plane;
    let y_row_stride = y_plane.row_stride as usize;
    let mut offset = 0usize;
    if y_row_stride == width {
        nv21[..y_size].copy_from_slice(&y_plane.data[..y_size]);
        offset += y_size;
    } else {
        for row in 0..height {
            let src = row * y_row_stride;
            nv21[offset..offset + width].copy_from_slice(&y_plane.data[src..src + width]);
            offset += width;
        }
        debug_assert_eq!(offset, y_size);
    }

    let u_plane = &image.u_plane;
    let v_plane = &image.v_plane;
    if chroma_storage == YuvChromaStorage::Interleaved
        && v_plane.row_stride as usize == width
        && v_plane.pixel_stride == 2
    {
        // V leads U by one byte in the shared region, so its view misses the
        // trailing U sample and holds uv_size - 1 bytes.
        if v_plane.data.len() != uv_size - 1 {
            return Err(YuvError::InterleavedChromaSizeMismatch(MismatchedSize {
                expected: uv_size - 1,
                received: v_plane.data.len(),
            }));
        }
        nv21[offset] = v_plane.data[0];
        offset += 1;
        nv21[offset..offset + uv_size - 1].copy_from_slice(&u_plane.data[..uv_size - 1]);
        offset += uv_size - 1;
    } else {
        // Chroma strides are checked identical, one index addresses both planes.
        let uv_row_stride = v_plane.row_stride as usize;
        let uv_pixel_stride = v_plane.pixel_stride as usize;
        for row in 0..height / 2 {
            for col in 0..width / 2 {
                let index = row * uv_row_stride + col * uv_pixel_stride;
                nv21[offset] = v_plane.data[index];
                nv21[offset + 1] = u_plane.data[index];
                offset += 2;
            }
        }
    }
    debug_assert_eq!(offset, size);

    Ok(nv21)
}
