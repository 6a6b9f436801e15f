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
use crate::images::YuvImagePlane;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedStrides {
    pub u_stride: u32,
    pub v_stride: u32,
}

#[derive(Debug)]
pub enum YuvError {
    ZeroBaseSize,
    OddImageSize { width: u32, height: u32 },
    PointerOverflow,
    UnsupportedLumaPixelStride(u32),
    UnsupportedChromaPixelStride(u32),
    ChromaRowStrideMismatch(MismatchedStrides),
    ChromaPixelStrideMismatch(MismatchedStrides),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    InterleavedChromaSizeMismatch(MismatchedSize),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::OddImageSize { width, height } => f.write_fmt(format_args!(
                "4:2:0 subsampling requires even dimensions, but {}x{} was received",
                width, height
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::UnsupportedLumaPixelStride(stride) => f.write_fmt(format_args!(
                "Luma plane must have pixel stride 1, but it was {}",
                stride
            )),
            YuvError::UnsupportedChromaPixelStride(stride) => f.write_fmt(format_args!(
                "Chroma planes must have pixel stride 1 or 2, but it was {}",
                stride
            )),
            YuvError::ChromaRowStrideMismatch(strides) => f.write_fmt(format_args!(
                "Chroma planes must share one row stride, but U was {} and V was {}",
                strides.u_stride, strides.v_stride
            )),
            YuvError::ChromaPixelStrideMismatch(strides) => f.write_fmt(format_args!(
                "Chroma planes must share one pixel stride, but U was {} and V was {}",
                strides.u_stride, strides.v_stride
            )),
            YuvError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::InterleavedChromaSizeMismatch(size) => f.write_fmt(format_args!(
                "Interleaved chroma plane have invalid size, it must be {}, but it was {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), YuvError> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_luma_plane(
    plane: &YuvImagePlane,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    if plane.pixel_stride != 1 {
        return Err(YuvError::UnsupportedLumaPixelStride(plane.pixel_stride));
    }
    check_overflow_v2(plane.row_stride as usize, height as usize)?;
    check_overflow_v2(width as usize, height as usize)?;
    // The last row only needs `width` valid bytes, trailing padding may be absent.
    let min_size = (height as usize - 1) * plane.row_stride as usize + width as usize;
    if plane.data.len() < min_size {
        return Err(YuvError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: min_size,
            received: plane.data.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_chroma_plane(
    plane: &YuvImagePlane,
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    if plane.pixel_stride != 1 && plane.pixel_stride != 2 {
        return Err(YuvError::UnsupportedChromaPixelStride(plane.pixel_stride));
    }
    let chroma_width = width as usize / 2;
    let chroma_height = height as usize / 2;
    check_overflow_v2(plane.row_stride as usize, chroma_height)?;
    let min_size = (chroma_height - 1) * plane.row_stride as usize
        + (chroma_width - 1) * plane.pixel_stride as usize
        + 1;
    if plane.data.len() < min_size {
        return Err(YuvError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
            expected: min_size,
            received: plane.data.len(),
        }));
    }
    Ok(())
}
