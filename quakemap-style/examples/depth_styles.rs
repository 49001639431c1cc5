use quakemap_common::types::GeoFeatureSample;
use quakemap_style::{build_legend_buckets, style_for};

fn main() {
    println!("=== Depth legend ===\n");
    for bucket in build_legend_buckets() {
        println!("  {}  {}", bucket.color, bucket.text_label());
    }

    println!("\n=== Marker styles ===\n");
    let samples = [
        GeoFeatureSample::new(-1.2, 0.0),
        GeoFeatureSample::new(10.0, 2.5),
        GeoFeatureSample::new(35.0, 4.1),
        GeoFeatureSample::new(90.0, 5.0),
        GeoFeatureSample::new(612.3, 7.6),
    ];
    for sample in samples {
        let style = style_for(sample);
        println!(
            "  depth {:>6} km, mag {:>4} → fill {} radius {}",
            sample.depth_km, sample.magnitude, style.fill_color, style.radius
        );
    }
}
