//! Loader & normalizer tests — header checks, day-first dates, error kinds.

use chrono::NaiveDate;
use sales_report_core::{
    loader::OrderLoader, types::YearMonth, ReportConfig, ReportError,
};
use std::io::Write;

const HEADER: &str =
    "ORDERNUMBER,CUSTOMERNAME,ORDERDATE,SALES,QUANTITYORDERED,PRICEEACH,COUNTRY,PRODUCTLINE,DEALSIZE,STATUS";

fn loader() -> OrderLoader {
    OrderLoader::new(&ReportConfig::default()).unwrap()
}

fn csv(lines: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out.push('\n');
    out
}

#[test]
fn loads_rows_and_ignores_extra_columns() {
    let input = csv(&[
        "10107,Land of Toys Inc.,24/02/2018,2871.00,30,95.70,USA,Motorcycles,Small,Shipped",
        "10121,Reims Collectables,07/05/2018,2765.90,34,81.35,France,Motorcycles,Small,Shipped",
    ]);
    let table = loader().load_reader(input.as_bytes()).unwrap();

    assert_eq!(table.len(), 2);
    let first = &table.rows()[0];
    assert_eq!(first.customer_name, "Land of Toys Inc.");
    assert_eq!(first.order_date, NaiveDate::from_ymd_opt(2018, 2, 24).unwrap());
    assert_eq!(first.quantity_ordered, 30);
    assert!((first.sales - 2871.0).abs() < 1e-9);
    assert_eq!(first.country, "USA");
    assert_eq!(first.deal_size, "Small");
}

#[test]
fn derives_year_and_month_bucket() {
    let input = csv(&["1,A,07/05/2018,10,1,10,USA,Planes,Small,Shipped"]);
    let table = loader().load_reader(input.as_bytes()).unwrap();
    let row = &table.rows()[0];

    assert_eq!(row.year, 2018);
    assert_eq!(row.month, YearMonth { year: 2018, month: 5 });
    assert_eq!(row.month.to_string(), "2018-05");
}

#[test]
fn whitespace_around_fields_is_trimmed() {
    let input = csv(&["1,  A  , 07/05/2018 , 10 ,1,10,USA,Planes,Small,Shipped"]);
    let table = loader().load_reader(input.as_bytes()).unwrap();
    assert_eq!(table.rows()[0].customer_name, "A");
}

#[test]
fn missing_date_column_is_a_parse_error() {
    let input = "CUSTOMERNAME,SALES,QUANTITYORDERED,PRICEEACH,COUNTRY,PRODUCTLINE,DEALSIZE\n\
                 A,10,1,10,USA,Planes,Small\n";
    let err = loader().load_reader(input.as_bytes()).unwrap_err();

    match &err {
        ReportError::MissingColumn { column } => assert_eq!(column, "ORDERDATE"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
    assert!(err.is_parse());
    assert!(!err.is_io());
}

#[test]
fn unparseable_date_reports_line_and_value() {
    let input = csv(&[
        "1,A,07/05/2018,10,1,10,USA,Planes,Small,Shipped",
        "2,B,31/31/2018,10,1,10,USA,Planes,Small,Shipped",
    ]);
    let err = loader().load_reader(input.as_bytes()).unwrap_err();

    match &err {
        ReportError::InvalidDate { line, value } => {
            assert_eq!(*line, 3);
            assert_eq!(value, "31/31/2018");
        }
        other => panic!("expected InvalidDate, got {other:?}"),
    }
    assert!(err.is_parse());
}

#[test]
fn malformed_number_is_a_parse_error() {
    let input = csv(&["1,A,07/05/2018,lots,1,10,USA,Planes,Small,Shipped"]);
    let err = loader().load_reader(input.as_bytes()).unwrap_err();
    assert!(matches!(err, ReportError::Csv(_)), "got {err:?}");
    assert!(err.is_parse());
}

#[test]
fn negative_sales_is_rejected() {
    let input = csv(&["1,A,07/05/2018,-10,1,10,USA,Planes,Small,Shipped"]);
    let err = loader().load_reader(input.as_bytes()).unwrap_err();
    match err {
        ReportError::NegativeValue { column, .. } => assert_eq!(column, "SALES"),
        other => panic!("expected NegativeValue, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = loader()
        .load_path("/no/such/dir/Auto Sales data.csv")
        .unwrap_err();
    assert!(err.is_io(), "got {err:?}");
    assert!(!err.is_parse());
}

#[test]
fn configured_delimiter_is_used() {
    let config = ReportConfig {
        delimiter: ';',
        ..ReportConfig::default()
    };
    let input = "CUSTOMERNAME;ORDERDATE;SALES;QUANTITYORDERED;PRICEEACH;COUNTRY;PRODUCTLINE;DEALSIZE\n\
                 A;01/03/2021;10.5;1;10.5;USA;Planes;Small\n";
    let table = OrderLoader::new(&config)
        .unwrap()
        .load_reader(input.as_bytes())
        .unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.rows()[0].order_date,
        NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()
    );
}

#[test]
fn loads_from_disk_via_config_path() {
    let path = std::env::temp_dir().join(format!("loader-disk-{}.csv", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(csv(&["1,A,07/05/2018,10,1,10,USA,Planes,Small,Shipped"]).as_bytes())
        .unwrap();
    drop(file);

    let config = ReportConfig::default().with_input_path(path.display().to_string());
    let table = sales_report_core::loader::load_orders(&config).unwrap();
    assert_eq!(table.len(), 1);

    std::fs::remove_file(&path).ok();
}
