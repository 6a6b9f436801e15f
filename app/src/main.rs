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
use rand::Rng;
use std::time::Instant;
use yuv_repack::{
    yuv420_to_nv21, yuv420_to_planar_packed, Yuv420MultiPlanarImage, YuvChromaStorage,
    YuvImagePlane,
};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;
const ROW_PADDING: usize = 64;

fn main() {
    let mut rng = rand::rng();

    let width = WIDTH as usize;
    let height = HEIGHT as usize;
    let y_row_stride = width + ROW_PADDING;

    let mut y_plane = vec![0u8; y_row_stride * height - ROW_PADDING];
    rng.fill(y_plane.as_mut_slice());

    // Semi-planar chroma region, the layout camera pipelines commonly hand out.
    let uv_size = width * height / 2;
    let mut uv_backing = vec![0u8; uv_size];
    rng.fill(uv_backing.as_mut_slice());

    let interleaved = Yuv420MultiPlanarImage {
        y_plane: YuvImagePlane {
            data: &y_plane,
            row_stride: y_row_stride as u32,
            pixel_stride: 1,
        },
        u_plane: YuvImagePlane {
            data: &uv_backing[1..],
            row_stride: WIDTH,
            pixel_stride: 2,
        },
        v_plane: YuvImagePlane {
            data: &uv_backing[..uv_size - 1],
            row_stride: WIDTH,
            pixel_stride: 2,
        },
        width: WIDTH,
        height: HEIGHT,
    };

    let start_time = Instant::now();
    let nv21_fast = yuv420_to_nv21(&interleaved, YuvChromaStorage::Interleaved).unwrap();
    println!("NV21 interleaved fast path: {:?}", start_time.elapsed());

    let start_time = Instant::now();
    let nv21_general = yuv420_to_nv21(&interleaved, YuvChromaStorage::Separate).unwrap();
    println!("NV21 alias-free general path: {:?}", start_time.elapsed());

    assert_eq!(nv21_fast, nv21_general);

    let start_time = Instant::now();
    let planar = yuv420_to_planar_packed(&interleaved);
    println!("Planar concatenation: {:?}", start_time.elapsed());

    println!(
        "NV21 {} bytes, planar {} bytes for {}x{}",
        nv21_fast.len(),
        planar.len(),
        WIDTH,
        HEIGHT
    );
}
