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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv_repack::{
    yuv420_to_nv21, yuv420_to_planar_packed, Yuv420MultiPlanarImage, YuvChromaStorage,
    YuvImagePlane,
};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();

    let width = WIDTH as usize;
    let height = HEIGHT as usize;

    let mut y_plane = vec![0u8; width * height];
    rng.fill(y_plane.as_mut_slice());

    let uv_size = width * height / 2;
    let mut uv_backing = vec![0u8; uv_size];
    rng.fill(uv_backing.as_mut_slice());

    let chroma_size = (width / 2) * (height / 2);
    let mut u_plane = vec![0u8; chroma_size];
    rng.fill(u_plane.as_mut_slice());
    let mut v_plane = vec![0u8; chroma_size];
    rng.fill(v_plane.as_mut_slice());

    let interleaved = Yuv420MultiPlanarImage {
        y_plane: YuvImagePlane {
            data: &y_plane,
            row_stride: WIDTH,
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

    let separate = Yuv420MultiPlanarImage {
        y_plane: YuvImagePlane {
            data: &y_plane,
            row_stride: WIDTH,
            pixel_stride: 1,
        },
        u_plane: YuvImagePlane {
            data: &u_plane,
            row_stride: WIDTH / 2,
            pixel_stride: 1,
        },
        v_plane: YuvImagePlane {
            data: &v_plane,
            row_stride: WIDTH / 2,
            pixel_stride: 1,
        },
        width: WIDTH,
        height: HEIGHT,
    };

    c.bench_function("yuv-repack: NV21 interleaved fast path", |b| {
        b.iter(|| {
            yuv420_to_nv21(&interleaved, YuvChromaStorage::Interleaved).unwrap();
        })
    });

    c.bench_function("yuv-repack: NV21 aliased views, general path", |b| {
        b.iter(|| {
            yuv420_to_nv21(&interleaved, YuvChromaStorage::Separate).unwrap();
        })
    });

    c.bench_function("yuv-repack: NV21 separate planes", |b| {
        b.iter(|| {
            yuv420_to_nv21(&separate, YuvChromaStorage::Separate).unwrap();
        })
    });

    c.bench_function("yuv-repack: planar concatenation", |b| {
        b.iter(|| {
            yuv420_to_planar_packed(&separate);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
