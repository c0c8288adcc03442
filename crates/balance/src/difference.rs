//! Rainfall minus PET.

use spei_table::Series;

use crate::align::AlignedPair;

/// Elementwise `rainfall - pet` over an aligned pair.
///
/// The output keeps the pair's schema and date index. A cell is missing when
/// either operand is missing.
pub fn water_balance(pair: &AlignedPair) -> Series {
    let rainfall = pair.rainfall();
    let pet = pair.pet();
    let columns: Vec<Vec<Option<f64>>> = rainfall
        .columns()
        .iter()
        .zip(pet.columns())
        .map(|(r, p)| {
            r.iter()
                .zip(p)
                .map(|(&r, &p)| Some(r? - p?))
                .collect()
        })
        .collect();

    Series::new(rainfall.schema().clone(), rainfall.dates().to_vec(), columns)
        .expect("aligned inputs share schema and dates")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use spei_calendar::YearMonth;
    use spei_table::{AreaId, AreaSchema};

    fn one_column(values: Vec<Option<f64>>) -> Series {
        let dates = (0..values.len())
            .map(|i| YearMonth::new(2000 + i as i32, 6).unwrap())
            .collect();
        let schema = AreaSchema::new(vec![AreaId::new("A")]).unwrap();
        Series::new(schema, dates, vec![values]).unwrap()
    }

    #[test]
    fn subtracts_pet() {
        let pair = align(
            &one_column(vec![Some(80.0), Some(20.0)]),
            &one_column(vec![Some(30.0), Some(45.0)]),
        );
        let wb = water_balance(&pair);
        assert_eq!(wb.column(0), &[Some(50.0), Some(-25.0)]);
        assert_eq!(wb.dates(), pair.rainfall().dates());
    }

    #[test]
    fn missing_propagates_from_either_side() {
        let pair = align(
            &one_column(vec![None, Some(1.0), None]),
            &one_column(vec![Some(1.0), None, None]),
        );
        let wb = water_balance(&pair);
        assert_eq!(wb.column(0), &[None, None, None]);
    }
}
