use roadcount_core::{TallySheet, VehicleClass};

#[test]
fn new_sheet_starts_all_zero() {
    let sheet = TallySheet::new();
    for class in VehicleClass::ALL {
        assert_eq!(sheet.count(class), 0);
    }
    assert_eq!(sheet.total(), 0);
}

#[test]
fn increments_are_exact_and_independent() {
    let mut sheet = TallySheet::new();

    sheet.increment(VehicleClass::Bus);
    sheet.increment(VehicleClass::Bus);
    sheet.increment(VehicleClass::Car);
    let bus_count = sheet.increment(VehicleClass::Bus);

    assert_eq!(bus_count, 3);
    assert_eq!(sheet.count(VehicleClass::Bus), 3);
    assert_eq!(sheet.count(VehicleClass::Car), 1);
    for class in VehicleClass::ALL {
        if class != VehicleClass::Bus && class != VehicleClass::Car {
            assert_eq!(sheet.count(class), 0, "unexpected count for {class}");
        }
    }
    assert_eq!(sheet.total(), 4);
}

#[test]
fn increment_count_equals_number_of_calls() {
    let mut sheet = TallySheet::new();
    for round in 1..=50 {
        assert_eq!(sheet.increment(VehicleClass::Rickshaw), round);
    }
    assert_eq!(sheet.count(VehicleClass::Rickshaw), 50);
}

#[test]
fn reset_zeroes_every_class() {
    let mut sheet = TallySheet::new();
    for class in VehicleClass::ALL {
        sheet.increment(class);
        sheet.increment(class);
    }
    assert_eq!(sheet.total(), 2 * VehicleClass::COUNT as u64);

    sheet.reset();

    for class in VehicleClass::ALL {
        assert_eq!(sheet.count(class), 0);
    }
    assert_eq!(sheet, TallySheet::new());
}

#[test]
fn rows_follow_survey_order() {
    let mut sheet = TallySheet::new();
    sheet.increment(VehicleClass::Truck);

    let rows: Vec<_> = sheet.rows().collect();
    assert_eq!(rows.len(), VehicleClass::COUNT);
    for (row, class) in rows.iter().zip(VehicleClass::ALL) {
        assert_eq!(row.0, class);
    }
    assert_eq!(rows.last().unwrap(), &(VehicleClass::Truck, 1));
}
