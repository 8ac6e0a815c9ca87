// File: crates/window-demo/src/main.rs
// Summary: Windowed demo blitting a SpectrumPlot into a winit window via softbuffer; cursor
// movement drives the hover marker, left click the click marker.
// Keys: M toggles markers, L toggles the legend, Space shifts the second spectrum's peak.

use anyhow::{anyhow, Result};
use spectrum_core::{MemoryHost, PlotOptions, PointerEvent, SpectrumPlot};
use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;
use tracing::error;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const WIDTH: u32 = 960;
const HEIGHT: u32 = 480;
const POINTS: usize = 301;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Spectrum Plot - Window Demo")
        .with_inner_size(PhysicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e:?}"))?;

    let mut host = MemoryHost::new();
    host.register("window");
    let mut plot: SpectrumPlot =
        SpectrumPlot::create(&mut host, "window", WIDTH as i32, HEIGHT as i32, PlotOptions::default().with_decimals(2))?;

    // Wavelength axis 400..700 nm
    let labels = (0..POINTS).map(|i| 400.0 + i as f64).collect::<Vec<_>>();
    plot.add_spectrum_with("reference", peaks(&labels, &[(480.0, 18.0, 1.0), (610.0, 30.0, 0.6)]), "rgba(0, 130, 200, 1)", false);
    let mut peak = 550.0;
    let sample = plot.add_spectrum_with("sample", peaks(&labels, &[(peak, 12.0, 0.8)]), "rgba(230, 25, 75, 1)", false);
    plot.set_labels(Some(labels.clone()));
    plot.set_marker_color("hover", "rgba(120, 120, 120, 0.8)")?;
    plot.enable_markers()?;

    // Latest readings shown in the window title.
    let status = Rc::new(RefCell::new(String::new()));
    for event_name in ["hover", "click"] {
        let status = Rc::clone(&status);
        plot.on(event_name, move |reading| {
            let parts = reading.iter().map(|r| format!("{}={}", r.label, r.y)).collect::<Vec<_>>();
            let x = reading.first().map(|r| r.x).unwrap_or(f64::NAN);
            *status.borrow_mut() = format!("{event_name} @ {x} nm: {}", parts.join(", "));
        });
    }

    let mut cursor = (0.0f32, 0.0f32);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let result = match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    Ok(())
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x as f32, position.y as f32);
                    plot.dispatch(PointerEvent::Move { x: cursor.0, y: cursor.1 })
                }
                WindowEvent::CursorEntered { .. } => plot.dispatch(PointerEvent::Enter),
                WindowEvent::CursorLeft { .. } => plot.dispatch(PointerEvent::Leave),
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    plot.dispatch(PointerEvent::Click { x: cursor.0, y: cursor.1 })
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::M if plot.markers_enabled() => plot.disable_markers(),
                    VirtualKeyCode::M => plot.enable_markers(),
                    VirtualKeyCode::L => plot.show_legend(!plot.legend_visible()),
                    VirtualKeyCode::Space => {
                        peak = if peak >= 680.0 { 420.0 } else { peak + 10.0 };
                        plot.update_spectrum(sample, peaks(&labels, &[(peak, 12.0, 0.8)]));
                        plot.draw()
                    }
                    _ => Ok(()),
                },
                _ => Ok(()),
            },
            Event::MainEventsCleared => {
                let title = status.borrow();
                if !title.is_empty() {
                    window.set_title(&title);
                }
                window.request_redraw();
                Ok(())
            }
            Event::RedrawRequested(_) => present(&mut plot, &mut surface).map_err(Into::into),
            _ => Ok(()),
        };
        if let Err(e) = result {
            error!("{e:#}");
        }
    })
}

/// Copy the plot surface into the window buffer.
fn present(plot: &mut SpectrumPlot, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h, _) = plot.to_rgba8()?;
    let (nw, nh) = (NonZeroU32::new(w).ok_or_else(|| anyhow!("zero width"))?, NonZeroU32::new(h).ok_or_else(|| anyhow!("zero height"))?);
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e:?}"))?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e:?}"))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        frame[i] = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow!("present: {e:?}"))?;
    Ok(())
}

/// Sum of gaussian peaks (center, width, height) sampled at `xs`.
fn peaks(xs: &[f64], shape: &[(f64, f64, f64)]) -> Vec<f64> {
    xs.iter()
        .map(|&x| shape.iter().map(|&(c, w, a)| a * (-((x - c) / w).powi(2) * 0.5).exp()).sum())
        .collect()
}
