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
use yuv_repack::{yuv420_to_planar_packed, Yuv420MultiPlanarImage, YuvImagePlane};

fuzz_target!(|data: (u16, u16, u16, u8)| {
    fuzz_flatten(data.0, data.1, data.2, data.3);
});

fn fuzz_flatten(y_len: u16, u_len: u16, v_len: u16, value: u8) {
    let y_plane = vec![value; y_len as usize];
    let u_plane = vec![value.wrapping_add(1); u_len as usize];
    let v_plane = vec![value.wrapping_add(2); v_len as usize];

    let image = Yuv420MultiPlanarImage {
        y_plane: YuvImagePlane {
            data: &y_plane,
            row_stride: 0,
            pixel_stride: 1,
        },
        u_plane: YuvImagePlane {
            data: &u_plane,
            row_stride: 0,
            pixel_stride: 1,
        },
        v_plane: YuvImagePlane {
            data: &v_plane,
            row_stride: 0,
            pixel_stride: 1,
        },
        width: 0,
        height: 0,
    };

    let packed = yuv420_to_planar_packed(&image);
    assert_eq!(packed.len(), y_len as usize + u_len as usize + v_len as usize);
    assert_eq!(&packed[..y_len as usize], y_plane.as_slice());
    assert_eq!(
        &packed[y_len as usize..y_len as usize + u_len as usize],
        u_plane.as_slice()
    );
    assert_eq!(&packed[y_len as usize + u_len as usize..], v_plane.as_slice());
}
