//! Stylised car body built from sphere impostors: a low hull, a cabin and four
//! wheels, all in model space and turned by the model matrix.

use crate::gpu::InstanceData;
use glam::{Mat4, Vec3};

const HULL_COLOR: [f32; 4] = [0.75, 0.75, 0.78, 1.0];
const CABIN_COLOR: [f32; 4] = [0.2, 0.25, 0.3, 1.0];
const WHEEL_COLOR: [f32; 4] = [0.08, 0.08, 0.08, 1.0];

const STEP: f32 = 0.25;
const HULL_SCALE: f32 = 0.3;
const WHEEL_SCALE: f32 = 0.45;

fn steps(from: f32, to: f32) -> impl Iterator<Item = f32> {
    let n = ((to - from) / STEP).round() as i32;
    (0..=n).map(move |i| from + i as f32 * STEP)
}

fn block(
    out: &mut Vec<InstanceData>,
    model: Mat4,
    xs: (f32, f32),
    ys: &[f32],
    zs: (f32, f32),
    color: [f32; 4],
) {
    for &y in ys {
        for x in steps(xs.0, xs.1) {
            for z in steps(zs.0, zs.1) {
                out.push(InstanceData {
                    pos: model.transform_point3(Vec3::new(x, y, z)).to_array(),
                    scale: HULL_SCALE,
                    color,
                });
            }
        }
    }
}

pub fn body_instances(model: Mat4) -> Vec<InstanceData> {
    let mut out = Vec::with_capacity(400);
    block(&mut out, model, (-0.875, 0.875), &[0.1, 0.3], (-2.0, 2.0), HULL_COLOR);
    block(&mut out, model, (-0.625, 0.625), &[0.5, 0.7], (-1.0, 0.75), CABIN_COLOR);
    for (x, z) in [(-0.85, -1.3), (0.85, -1.3), (-0.85, 1.3), (0.85, 1.3)] {
        out.push(InstanceData {
            pos: model.transform_point3(Vec3::new(x, 0.0, z)).to_array(),
            scale: WHEEL_SCALE,
            color: WHEEL_COLOR,
        });
    }
    out
}
