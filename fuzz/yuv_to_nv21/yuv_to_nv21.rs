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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuv_repack::{
    yuv420_to_nv21, Yuv420MultiPlanarImage, YuvChromaStorage, YuvImagePlane,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_separate_planes(data.0, data.1, data.2, data.3, data.4);
    fuzz_interleaved_views(data.0, data.1, data.3, data.4);
    fuzz_arbitrary_geometry(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_separate_planes(half_width: u8, half_height: u8, pad: u8, y_value: u8, uv_value: u8) {
    if half_width == 0 || half_height == 0 {
        return;
    }
    let width = half_width as usize * 2;
    let height = half_height as usize * 2;
    let y_row_stride = width + pad as usize;
    let uv_row_stride = width / 2 + pad as usize;

    let y_plane = vec![y_value; y_row_stride * height];
    let u_plane = vec![uv_value; uv_row_stride * (height / 2)];
    let v_plane = vec![uv_value; uv_row_stride * (height / 2)];

    let image = Yuv420MultiPlanarImage {
        y_plane: YuvImagePlane {
            data: &y_plane,
            row_stride: y_row_stride as u32,
            pixel_stride: 1,
        },
        u_plane: YuvImagePlane {
            data: &u_plane,
            row_stride: uv_row_stride as u32,
            pixel_stride: 1,
        },
        v_plane: YuvImagePlane {
            data: &v_plane,
            row_stride: uv_row_stride as u32,
            pixel_stride: 1,
        },
        width: width as u32,
        height: height as u32,
    };

    let nv21 = yuv420_to_nv21(&image, YuvChromaStorage::Separate).unwrap();
    assert_eq!(nv21.len(), width * height + width * height / 2);
}

fn fuzz_interleaved_views(half_width: u8, half_height: u8, y_value: u8, uv_value: u8) {
    if half_width == 0 || half_height == 0 {
        return;
    }
    let width = half_width as usize * 2;
    let height = half_height as usize * 2;
    let uv_size = width * height / 2;

    let y_plane = vec![y_value; width * height];
    let uv_backing = vec![uv_value; uv_size];

    let image = Yuv420MultiPlanarImage {
        y_plane: YuvImagePlane {
            data: &y_plane,
            row_stride: width as u32,
            pixel_stride: 1,
        },
        u_plane: YuvImagePlane {
            data: &uv_backing[1..],
            row_stride: width as u32,
            pixel_stride: 2,
        },
        v_plane: YuvImagePlane {
            data: &uv_backing[..uv_size - 1],
            row_stride: width as u32,
            pixel_stride: 2,
        },
        width: width as u32,
        height: height as u32,
    };

    let fast = yuv420_to_nv21(&image, YuvChromaStorage::Interleaved).unwrap();
    let general = yuv420_to_nv21(&image, YuvChromaStorage::Separate).unwrap();
    assert_eq!(fast, general);
}

// Deliberately broken geometry must come back as an error, never a panic.
fn fuzz_arbitrary_geometry(width: u8, height: u8, row_stride: u8, pixel_stride: u8, value: u8) {
    let y_plane = vec![value; width as usize * height as usize];
    let u_plane = vec![value; width as usize * height as usize];
    let v_plane = vec![value; width as usize * height as usize];

    let image = Yuv420MultiPlanarImage {
        y_plane: YuvImagePlane {
            data: &y_plane,
            row_stride: row_stride as u32,
            pixel_stride: 1,
        },
        u_plane: YuvImagePlane {
            data: &u_plane,
            row_stride: row_stride as u32,
            pixel_stride: pixel_stride as u32,
        },
        v_plane: YuvImagePlane {
            data: &v_plane,
            row_stride: row_stride as u32,
            pixel_stride: pixel_stride as u32,
        },
        width: width as u32,
        height: height as u32,
    };

    if let Ok(nv21) = yuv420_to_nv21(&image, YuvChromaStorage::Separate) {
        assert_eq!(
            nv21.len(),
            width as usize * height as usize + width as usize * height as usize / 2
        );
    }
}
