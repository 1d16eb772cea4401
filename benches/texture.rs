use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use asset_forge::asset_pipeline::{TextureArrayPipeline, ToneMapTable, pack_image};
use asset_forge::asset_pipeline::bitmap::TrueColorImage;
use std::io::Cursor;

fn generate_mock_bitmap(width: u32, height: u32) -> Vec<u8> {
    let bitmap = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(bitmap)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Bmp)
        .unwrap();
    bytes
}

fn generate_mock_image(width: usize, height: usize) -> TrueColorImage {
    let data = (0..width * height * 3).map(|i| (i % 256) as u8).collect();
    TrueColorImage { width, height, data }
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (64, 64, "64x64"),
        (128, 128, "128x128"),
        (256, 256, "256x256"),
    ];

    for (width, height, label) in sizes {
        let mock_data = generate_mock_bitmap(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_data,
            |b, data| {
                let pipeline = TextureArrayPipeline::new();

                b.iter(|| {
                    let mut output = Cursor::new(Vec::new());
                    let _ = pipeline.convert(black_box(data), &mut output);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_texel_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("texel_packing");
    let image = generate_mock_image(128, 128);

    group.bench_function("pack_128x128", |b| {
        b.iter(|| pack_image(black_box(&image)));
    });

    group.finish();
}

fn benchmark_lut_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_generation");

    group.bench_function("tone_map_table", |b| {
        b.iter(ToneMapTable::generate);
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_texel_packing,
    benchmark_lut_generation
);
criterion_main!(benches);
