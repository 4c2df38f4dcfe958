use anyhow::{anyhow, bail, Context};
use glam::Vec2;

use humanoid_scene::constants::DEFAULT_VIEWPORT;
use humanoid_scene::{
    tap_point_for, world_to_screen, BodyRegion, PrimitiveShape, RobotScene, RobotVariant,
    RobotViewer, Viewport,
};

const USAGE: &str = "usage: scene-native [VARIANT] [--viewport WxH] [--tap X,Y]... [--region NAME]...

VARIANT is one of optimus, figure, unitree-g1, lingxi (default optimus).
--tap     resolve a tap at pixel X,Y (origin top-left)
--region  tap the on-screen position of a body region's selectable part";

struct Args {
    variant: RobotVariant,
    viewport: Viewport,
    taps: Vec<Tap>,
}

enum Tap {
    Pixel(Vec2),
    Region(BodyRegion),
}

fn parse_pair(value: &str, sep: char) -> anyhow::Result<(f32, f32)> {
    let (a, b) = value
        .split_once(sep)
        .ok_or_else(|| anyhow!("expected two numbers separated by `{sep}`, got `{value}`"))?;
    let a = a.trim().parse::<f32>().with_context(|| format!("bad number `{a}`"))?;
    let b = b.trim().parse::<f32>().with_context(|| format!("bad number `{b}`"))?;
    Ok((a, b))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut variant = RobotVariant::Optimus;
    let mut viewport = Viewport::new(DEFAULT_VIEWPORT[0], DEFAULT_VIEWPORT[1])?;
    let mut taps = Vec::new();

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().ok_or_else(|| anyhow!("{flag} needs a value"));
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            "--viewport" => {
                let (w, h) = parse_pair(&value("--viewport")?, 'x')?;
                viewport = Viewport::new(w, h)?;
            }
            "--tap" => {
                let (x, y) = parse_pair(&value("--tap")?, ',')?;
                taps.push(Tap::Pixel(Vec2::new(x, y)));
            }
            "--region" => taps.push(Tap::Region(value("--region")?.parse()?)),
            other if other.starts_with('-') => bail!("unknown flag `{other}`\n{USAGE}"),
            other => variant = other.parse()?,
        }
    }
    Ok(Args {
        variant,
        viewport,
        taps,
    })
}

fn describe_shape(shape: &PrimitiveShape) -> String {
    match *shape {
        PrimitiveShape::Capsule { radius, height } => format!("capsule r={radius:.2} h={height:.2}"),
        PrimitiveShape::Box {
            width,
            height,
            length,
            corner_radius,
        } => format!("box {width:.2}x{height:.2}x{length:.2} c={corner_radius:.2}"),
        PrimitiveShape::Cylinder { radius, height } => {
            format!("cylinder r={radius:.2} h={height:.2}")
        }
        PrimitiveShape::Sphere { radius } => format!("sphere r={radius:.2}"),
        PrimitiveShape::Torus {
            ring_radius,
            pipe_radius,
        } => format!("torus R={ring_radius:.2} r={pipe_radius:.2}"),
    }
}

fn print_summary(scene: &RobotScene, viewport: &Viewport) {
    let variant = scene.variant();
    println!(
        "{} ({}) - {} nodes, {} lights",
        variant.display_name(),
        variant.localized_description(),
        scene.len(),
        scene.lights().len()
    );
    for (region, node) in scene.registry().iter() {
        let geometry = scene
            .node(node)
            .geometry
            .map(|g| describe_shape(&g.shape))
            .unwrap_or_default();
        let screen = world_to_screen(scene.camera(), viewport, scene.world_position(node))
            .filter(|p| viewport.contains(*p))
            .map(|p| format!("({:.0}, {:.0})", p.x, p.y))
            .unwrap_or_else(|| "off-screen".to_string());
        println!("  {:<10} {:<32} at {}", region.key(), geometry, screen);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let mut viewer = RobotViewer::new(args.variant);
    print_summary(viewer.scene(), &args.viewport);

    for tap in &args.taps {
        let point = match *tap {
            Tap::Pixel(p) => p,
            Tap::Region(region) => tap_point_for(viewer.scene(), &args.viewport, region)
                .ok_or_else(|| anyhow!("{region} is not visible in this viewport"))?,
        };
        match viewer.tap(&args.viewport, point) {
            Some(event) => {
                println!(
                    "tap ({:.0}, {:.0}) -> {} / {}: {}",
                    point.x,
                    point.y,
                    event.region.display_name(),
                    event.region.localized_name(),
                    event.region.description()
                );
                viewer.dismiss();
            }
            None => println!("tap ({:.0}, {:.0}) -> no selection", point.x, point.y),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parse_pair_reads_sizes_and_points() {
        assert_eq!(parse_pair("390x844", 'x').unwrap(), (390.0, 844.0));
        assert_eq!(parse_pair("12,34", ',').unwrap(), (12.0, 34.0));
        assert_eq!(parse_pair(" 1.5 , -2 ", ',').unwrap(), (1.5, -2.0));
    }

    #[test]
    fn parse_pair_rejects_malformed_input() {
        assert!(parse_pair("390", 'x').is_err());
        assert!(parse_pair("390x", 'x').is_err());
        assert!(parse_pair("abcx844", 'x').is_err());
        assert!(parse_pair("12,34", 'x').is_err());
    }

    #[test]
    fn defaults_without_arguments() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.variant, RobotVariant::Optimus);
        assert_eq!(parsed.viewport.width(), DEFAULT_VIEWPORT[0]);
        assert_eq!(parsed.viewport.height(), DEFAULT_VIEWPORT[1]);
        assert!(parsed.taps.is_empty());
    }

    #[test]
    fn flags_and_variant_are_collected_in_order() {
        let parsed = args(&[
            "unitree-g1",
            "--viewport",
            "100x200",
            "--tap",
            "10,20",
            "--region",
            "left_arm",
        ])
        .unwrap();
        assert_eq!(parsed.variant, RobotVariant::UnitreeG1);
        assert_eq!(parsed.viewport.width(), 100.0);
        assert_eq!(parsed.taps.len(), 2);
        assert!(matches!(parsed.taps[0], Tap::Pixel(p) if p == Vec2::new(10.0, 20.0)));
        assert!(matches!(parsed.taps[1], Tap::Region(BodyRegion::LeftArm)));
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(args(&["--viewport"]).is_err());
        assert!(args(&["--viewport", "0x100"]).is_err());
        assert!(args(&["--frobnicate"]).is_err());
        assert!(args(&["bender"]).is_err());
        assert!(args(&["--region", "tail"]).is_err());
    }
}
