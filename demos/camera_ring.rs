#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
//! Demo composing a ring of cameras around the origin.
//!
//! Eight cameras look at the origin from a ring above the XY plane, every
//! other one carrying a synthetic gradient image. A mesh or point cloud can be
//! passed on the command line:
//!
//! ```text
//! cargo run --example camera_ring -- [mesh.obj|mesh.ply] [points.ply|points.json]
//! ```
//!
//! The scene is written to stdout as JSON.

use std::f32::consts::TAU;

use camviz::{
    CameraColor, CameraEntry, CameraPose, Color, RenderOptions, RgbImage, SceneComposer, Vec3,
};

const NUM_CAMERAS: usize = 8;
const RING_RADIUS: f32 = 2.5;
const RING_HEIGHT: f32 = 1.0;

fn gradient(width: u32, height: u32, hue: f32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let u = x as f32 / width as f32;
        let v = y as f32 / height as f32;
        image::Rgb([(255.0 * u) as u8, (255.0 * v) as u8, (255.0 * hue) as u8])
    })
}

fn main() -> camviz::Result<()> {
    env_logger::init();

    let mut cameras = Vec::with_capacity(NUM_CAMERAS);
    for i in 0..NUM_CAMERAS {
        let t = i as f32 / NUM_CAMERAS as f32;
        let angle = t * TAU;
        let position = Vec3::new(
            RING_RADIUS * angle.cos(),
            RING_RADIUS * angle.sin(),
            RING_HEIGHT,
        );
        let pose = CameraPose::look_at(position, Vec3::ZERO, Vec3::Z);
        let color = CameraColor::TwoTone(Color::new(1.0 - t, 0.2, t), Color::new(0.1, 0.1, 0.1));

        let mut entry = CameraEntry::new(pose, format!("view {i}"), color);
        if i % 2 == 0 {
            entry = entry.with_image(gradient(64, 48, t))?;
        }
        cameras.push(entry);
    }

    let mut args = std::env::args().skip(1);
    let mut composer = SceneComposer::new(cameras).with_camera_x(0.6);
    if let Some(mesh_path) = args.next() {
        composer = composer.with_mesh_path(mesh_path)?;
    }
    if let Some(pc_path) = args.next() {
        composer = composer.with_point_cloud_path(pc_path)?;
    }

    let options = RenderOptions {
        show_grid: true,
        ..RenderOptions::default()
    }
    .with_fov(40.0);
    let scene = composer.render(RING_RADIUS + 0.5, &options)?;
    log::info!("scene has {} traces", scene.traces.len());
    println!("{}", scene.to_json()?);

    Ok(())
}
