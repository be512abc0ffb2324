use bevy::math::Vec2;
use resumegraph_core::MarkerSymbol;
use std::f32::consts::{FRAC_PI_2, TAU};

const CIRCLE_SEGMENTS: usize = 24;
const STAR_INNER: f32 = 0.45;

pub fn marker_outline(symbol: MarkerSymbol, center: Vec2, radius: f32) -> Vec<Vec2> {
    let mut pts = match symbol {
        MarkerSymbol::Circle => polygon(center, radius, CIRCLE_SEGMENTS, 0.0),
        MarkerSymbol::Square => polygon(center, radius, 4, TAU / 8.0),
        MarkerSymbol::Diamond => polygon(center, radius, 4, 0.0),
        MarkerSymbol::TriangleUp => polygon(center, radius, 3, FRAC_PI_2),
        MarkerSymbol::Hexagon => polygon(center, radius, 6, 0.0),
        MarkerSymbol::Star => (0..10)
            .map(|i| {
                let r = if i % 2 == 0 { radius } else { radius * STAR_INNER };
                let a = FRAC_PI_2 + i as f32 * TAU / 10.0;
                center + Vec2::new(a.cos(), a.sin()) * r
            })
            .collect(),
    };
    if let Some(&first) = pts.first() {
        pts.push(first);
    }
    pts
}

fn polygon(center: Vec2, radius: f32, sides: usize, phase: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let a = phase + i as f32 * TAU / sides as f32;
            center + Vec2::new(a.cos(), a.sin()) * radius
        })
        .collect()
}

pub fn parse_css_color(input: &str) -> Option<[f32; 4]> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some([
            channel(0)? as f32 / 255.0,
            channel(2)? as f32 / 255.0,
            channel(4)? as f32 / 255.0,
            1.0,
        ]);
    }
    let inner = s.strip_prefix("rgba(")?.strip_suffix(')')?;
    let parts: Vec<f32> = inner
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [r, g, b, a] => Some([r / 255.0, g / 255.0, b / 255.0, a.clamp(0.0, 1.0)]),
        _ => None,
    }
}
