use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dta2csv::encode_intensities;

/// First derivative of a Lorentzian line, the usual shape of a CW-EPR signal.
fn lorentzian_derivative(b: f64, center: f64, width: f64, amplitude: f64) -> f64 {
    let u = (b - center) / width;
    -amplitude * 2.0 * u / (1.0 + u * u).powi(2)
}

fn generate_spectrum(
    field: &[f64],
    lines: &[(f64, f64, f64)],
    noise_level: f64,
    noise: &mut Noise,
) -> Vec<f64> {
    field
        .iter()
        .map(|&b| {
            let signal: f64 = lines
                .iter()
                .map(|&(center, width, amp)| lorentzian_derivative(b, center, width, amp))
                .sum();
            signal + noise_level * noise.next_symmetric()
        })
        .collect()
}

/// Deterministic uniform noise in `[-1, 1)` (splitmix64).
struct Noise(u64);

impl Noise {
    fn next_symmetric(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}

/// Descriptor text in the layout the converter reads: label, tab, value.
fn descriptor(points: usize, x_min: f64, x_width: f64, title: &str) -> String {
    format!(
        "#DESC\t1.2 * DESCRIPTOR INFORMATION ***********************\n\
         DSRC\tEXP\n\
         BSEQ\tBIG\n\
         IKKF\tREAL\n\
         XTYP\tIDX\n\
         IRFMT\tD\n\
         XPTS\t{points}\n\
         XMIN\t{x_min:.6}\n\
         XWID\t{x_width:.6}\n\
         TITL\t'{title}'\n\
         XNAM\t'Field'\n\
         XUNI\t'G'\n"
    )
}

fn write_pair(dir: &Path, name: &str, field: &[f64], y: &[f64], x_min: f64, x_width: f64) -> Result<()> {
    let dta = dir.join(format!("{name}.DTA"));
    let dsc = dir.join(format!("{name}.DSC"));
    std::fs::write(&dta, encode_intensities(y))
        .with_context(|| format!("writing {}", dta.display()))?;
    std::fs::write(&dsc, descriptor(field.len(), x_min, x_width, name))
        .with_context(|| format!("writing {}", dsc.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "sample_data".to_string()));
    let count: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("'{n}' is not a file count"))?,
        None => 3,
    };

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut noise = Noise(42);

    // 3390 G → 3490 G, 1024 points
    let points = 1024;
    let x_min = 3390.0;
    let x_width = 100.0;
    let step = x_width / points as f64;
    let field: Vec<f64> = (0..points).map(|i| x_min + i as f64 * step).collect();

    for n in 0..count {
        let shift = n as f64 * 2.5;
        let lines = vec![
            (3430.0 + shift, 3.0, 1.0),
            (3440.0 + shift, 2.0, 0.6),
            (3450.0 + shift, 3.0, 1.0),
        ];
        let y = generate_spectrum(&field, &lines, 0.01, &mut noise);
        write_pair(&out_dir, &format!("sample_{n}"), &field, &y, x_min, x_width)?;
    }

    println!(
        "Wrote {count} DTA/DSC pairs ({points} points each) to {}",
        out_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dta2csv::parse_parameters;

    #[test]
    fn test_descriptor_reads_back() {
        let dsc = descriptor(1024, 3390.0, 100.0, "sample_0");
        let p = parse_parameters(&dsc).unwrap();
        assert_eq!(p.point_count, 1024);
        assert_eq!(p.x_min, 3390.0);
        assert_eq!(p.x_width, 100.0);
        assert_eq!(dsc.lines().count(), 12);
        assert!(dsc.lines().all(|line| !line.starts_with(' ')));
    }

    #[test]
    fn test_noise_is_bounded_and_repeatable() {
        let mut a = Noise(7);
        let mut b = Noise(7);
        for _ in 0..1000 {
            let v = a.next_symmetric();
            assert!((-1.0..1.0).contains(&v));
            assert_eq!(v, b.next_symmetric());
        }
    }
}
