//! Severity Pie Chart
//!
//! Severity distribution chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Slice colors, assigned by entry order rather than severity identity
const SLICE_COLORS: [&str; 6] = [
    "#f87171", // Red
    "#facc15", // Yellow
    "#34d399", // Green
    "#60a5fa", // Blue
    "#a78bfa", // Purple
    "#e2e8f0", // Slate
];

/// Severity distribution pie chart
#[component]
pub fn PieChart(
    /// Severity label and count pairs, in display order
    counts: Vec<(String, usize)>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas node is attached
    let draw_counts = counts.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &draw_counts);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full max-w-md mx-auto rounded-lg"
            />

            // Legend
            <ChartLegend counts=counts />
        </div>
    }
}

/// Legend showing slice colors and counts
#[component]
fn ChartLegend(counts: Vec<(String, usize)>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {counts
                .into_iter()
                .enumerate()
                .map(|(idx, (label, count))| {
                    let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">
                                {format!("{} ({})", label, count)}
                            </span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Draw the pie onto the canvas
fn draw_pie(canvas: &HtmlCanvasElement, counts: &[(String, usize)]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#0f172a".into()); // slate-900
    ctx.fill_rect(0.0, 0.0, width, height);

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 30.0;

    // Start at twelve o'clock
    let mut start_angle = -std::f64::consts::FRAC_PI_2;

    for (idx, (_, count)) in counts.iter().enumerate() {
        let sweep = (*count as f64 / total as f64) * std::f64::consts::PI * 2.0;
        let end_angle = start_angle + sweep;
        let color = SLICE_COLORS[idx % SLICE_COLORS.len()];

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start_angle, end_angle);
        ctx.close_path();
        ctx.fill();

        // Count label just outside the slice midpoint
        let mid_angle = start_angle + sweep / 2.0;
        let label_x = cx + (radius + 16.0) * mid_angle.cos();
        let label_y = cy + (radius + 16.0) * mid_angle.sin();

        ctx.set_fill_style(&"#e2e8f0".into()); // slate-200
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&count.to_string(), label_x - 4.0, label_y + 4.0);

        start_angle = end_angle;
    }
}
