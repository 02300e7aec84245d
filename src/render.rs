use web_sys as web;

use crate::constants::PARTICLE_RGB;
use crate::core::particles::{link_alpha, Particle};

fn rgba(alpha: f32) -> String {
    let (r, g, b) = PARTICLE_RGB;
    format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha)
}

/// Draw the whole field: clear, one filled disc per particle, then a line
/// per sufficiently-close unordered pair. The pair pass is O(n^2), which is
/// fine only because the field is capped at 50 particles.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, particles: &[Particle], width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);

    for p in particles {
        ctx.begin_path();
        let _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&rgba(p.opacity));
        ctx.fill();
    }

    draw_links(ctx, particles);
}

fn draw_links(ctx: &web::CanvasRenderingContext2d, particles: &[Particle]) {
    ctx.set_line_width(1.0);
    for i in 0..particles.len() {
        for j in i + 1..particles.len() {
            let alpha = link_alpha(particles[i].pos.distance(particles[j].pos));
            if alpha <= 0.0 {
                continue;
            }
            ctx.begin_path();
            ctx.move_to(particles[i].pos.x as f64, particles[i].pos.y as f64);
            ctx.line_to(particles[j].pos.x as f64, particles[j].pos.y as f64);
            ctx.set_stroke_style_str(&rgba(alpha));
            ctx.stroke();
        }
    }
}
