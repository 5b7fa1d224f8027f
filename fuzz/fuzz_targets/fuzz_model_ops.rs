#![no_main]

//! Fuzz arbitrary operation sequences against the fit model invariants.

use libfuzzer_sys::fuzz_target;

use fitline_core::{Coefficient, FitModel};

fuzz_target!(|data: &[u8]| {
    let mut model = FitModel::new();

    for chunk in data.chunks_exact(3) {
        match chunk[0] % 4 {
            0 => {
                let x = i32::from(chunk[1] % 9) - 1;
                let y = i32::from(chunk[2] % 9) - 1;
                let _ = model.add_point(x, y);
            }
            1 => {
                let n = usize::from(chunk[1]) % model.len().max(1);
                if let Some(point) = model.points().get(n).copied() {
                    let _ = model.remove_point(point.id);
                }
            }
            2 => {
                let v = f64::from(i16::from_le_bytes([chunk[1], chunk[2]]));
                model.set_coefficient(Coefficient::Intercept, v);
            }
            _ => {
                let v = f64::from(i16::from_le_bytes([chunk[1], chunk[2]]));
                model.set_coefficient(Coefficient::Slope, v);
            }
        }

        assert!(model.len() <= model.capacity());
        let _ = model.total_squared_error();
    }

    // Ids stay strictly increasing in insertion order, hence unique.
    let ids: Vec<_> = model.points().iter().map(|p| p.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
});
