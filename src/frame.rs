use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::cursor::RingFollower;
use crate::core::particles::{self, Particle};
use crate::dom;
use crate::render;

/// Re-arm `cb` on every animation frame, indefinitely. The loop is never
/// explicitly stopped; it runs until the page unloads.
pub fn run_frames(mut cb: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        cb();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Frame loop that stops (and frees itself) once `cb` returns false.
pub fn run_frames_while(mut cb: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cb() {
            if let Some(w) = web::window() {
                _ = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        } else {
            tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Keep the canvas backing size in sync with the window's inner size. Stale
/// particle positions are not re-clamped; they wrap on their next update.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    let (w, h) = dom::viewport_size();
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_simple_listener(&window, "resize", move || {
            sync_canvas_to_viewport(&canvas_resize);
        });
    }
}

pub struct ParticleScene {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    particles: Vec<Particle>,
    started: Instant,
}

impl ParticleScene {
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        let (vw, _) = dom::viewport_size();
        let count = particles::particle_count_for_width(vw);
        let mut rng = rand::thread_rng();
        let particles =
            particles::spawn_field(&mut rng, count, canvas.width() as f32, canvas.height() as f32);
        Some(Self {
            canvas,
            ctx,
            particles,
            started: Instant::now(),
        })
    }

    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let (w, h) = (self.canvas.width() as f32, self.canvas.height() as f32);
        for p in &mut self.particles {
            p.advance(w, h, now_ms);
        }
        render::draw_field(&self.ctx, &self.particles, w as f64, h as f64);
    }
}

pub fn start_particle_loop(canvas: web::HtmlCanvasElement) {
    sync_canvas_to_viewport(&canvas);
    wire_canvas_resize(&canvas);
    let Some(mut scene) = ParticleScene::new(canvas) else {
        return;
    };
    run_frames(move || scene.frame());
}

/// Per-frame cursor pass: the dot snaps to the raw pointer, the ring trails
/// it through the follower's exponential smoothing.
pub fn start_cursor_loop(dot: web::HtmlElement, ring: web::HtmlElement, raw: Rc<RefCell<Vec2>>) {
    let mut follower = RingFollower::default();
    run_frames(move || {
        let target = *raw.borrow();
        dom::set_style(
            &dot,
            "transform",
            &format!("translate({:.2}px, {:.2}px)", target.x, target.y),
        );
        let ring_pos = follower.step(target);
        dom::set_style(
            &ring,
            "transform",
            &format!("translate({:.2}px, {:.2}px)", ring_pos.x, ring_pos.y),
        );
    });
}
