use log::*;

use whitted_rs::*;

fn main() -> Result<(), failure::Error> {
    simple_logger::init()?;
    let width = 400;
    let height = 300;

    let ctx = new_demo_scene(width, height)?;
    info!("rendering {}x{}, {} objects", width, height, ctx.objects.len());

    let mut frame = FrameBuf::new(width, height);
    frame.fill(|x, y| cast_ray(&ctx, ctx.camera.primary_ray(x, y), 1.0, 0));

    frame.mk_image().save("out.png")?;
    info!("wrote out.png");
    Ok(())
}
