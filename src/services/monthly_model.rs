/// Monthly table assembler.
///
/// Joins the per-month consumption and generation series one-to-one on
/// month index. Inputs covering anything other than exactly months 1–12
/// are a broken contract between the allocator, the adapter and this
/// module; assembly panics rather than producing a partial table.

use crate::models::simulation::MonthlyRecord;

/// Join two month-keyed series into twelve records sorted by month
/// ascending. Output order depends only on the month key, not on input
/// position.
pub fn assemble(consumption: &[(u32, f64)], generation: &[(u32, f64)]) -> Vec<MonthlyRecord> {
    let consumption = month_indexed(consumption, "consumption");
    let generation = month_indexed(generation, "generation");

    (0..12)
        .map(|i| MonthlyRecord {
            month: i as u32 + 1,
            consumption_kwh: consumption[i],
            generation_kwh: generation[i],
        })
        .collect()
}

/// Tag a January-first series (as the allocator and the generation adapter
/// produce them) with its month keys.
pub fn with_month_keys(series: &[f64; 12]) -> Vec<(u32, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, v)| (i as u32 + 1, *v))
        .collect()
}

fn month_indexed(series: &[(u32, f64)], label: &str) -> [f64; 12] {
    assert!(
        series.len() == 12,
        "{} series has {} entries, expected 12",
        label,
        series.len()
    );

    let mut slots = [None; 12];
    for (month, value) in series {
        assert!(
            (1..=12).contains(month),
            "{} series carries month {} out of range",
            label,
            month
        );
        let slot = &mut slots[*month as usize - 1];
        assert!(slot.is_none(), "{} series repeats month {}", label, month);
        *slot = Some(*value);
    }

    slots.map(|s| s.unwrap())
}
