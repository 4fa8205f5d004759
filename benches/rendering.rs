//! Benchmarks for rendering operations
//!
//! Run with: cargo bench rendering

use gridlook::image::ImageBuffer;
use gridlook::theme::ViewerTheme;
use gridlook::view::{Frame, Rect};
use gridlook::viewport::{Point, Viewport, ViewportSize};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn photo(width: u32, height: u32) -> ImageBuffer {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 128]);
        }
    }
    ImageBuffer::from_raw(width, height, pixels).unwrap()
}

fn viewport(width: usize, height: usize) -> Viewport {
    let mut vp = Viewport::new(ViewportSize::new(width as u32, height as u32));
    vp.load_image(photo(3000, 2000));
    vp
}

fn render_once(vp: &Viewport, buffer: &mut [u32], width: usize, height: usize) {
    let theme = ViewerTheme::default();
    let mut frame = Frame::new(buffer, width, height);
    vp.render(
        &mut frame,
        Rect::new(0.0, 0.0, width as f32, height as f32),
        &theme,
    );
}

// ============================================================================
// Full viewport render
// ============================================================================

#[divan::bench(args = [800, 1280, 1920, 2560])]
fn render_fit(bencher: divan::Bencher, width: usize) {
    let height = width * 9 / 16; // 16:9 aspect ratio
    let vp = viewport(width, height);
    let mut buffer: Vec<u32> = vec![0; width * height];

    bencher.bench_local(|| {
        render_once(&vp, &mut buffer, width, height);
        divan::black_box(&buffer);
    });
}

#[divan::bench(args = [800, 1280, 1920, 2560])]
fn render_fit_with_grid(bencher: divan::Bencher, width: usize) {
    let height = width * 9 / 16;
    let mut vp = viewport(width, height);
    vp.toggle_grid();
    let mut buffer: Vec<u32> = vec![0; width * height];

    bencher.bench_local(|| {
        render_once(&vp, &mut buffer, width, height);
        divan::black_box(&buffer);
    });
}

#[divan::bench(args = [1, 4, 8])]
fn render_zoomed_with_grid(bencher: divan::Bencher, steps: usize) {
    let (width, height) = (1280, 720);
    let mut vp = viewport(width, height);
    vp.toggle_grid();
    for _ in 0..steps {
        vp.on_wheel(1.0, Point::new(640.0, 360.0));
    }
    let mut buffer: Vec<u32> = vec![0; width * height];

    bencher.bench_local(|| {
        render_once(&vp, &mut buffer, width, height);
        divan::black_box(&buffer);
    });
}

// ============================================================================
// Alpha blending
// ============================================================================

#[divan::bench(args = [64, 512, 2048])]
fn blend_hspan(bencher: divan::Bencher, span: usize) {
    let mut buffer: Vec<u32> = vec![0xFF808080; span];
    bencher.bench_local(|| {
        let mut frame = Frame::new(&mut buffer, span, 1);
        frame.blend_hspan(0, span, 0, 0x96148CD2);
        divan::black_box(&buffer);
    });
}
