//! Converting a parsed UP document to JSON through serde.
//!
//! Run with: cargo run --example to_json

use std::error::Error;
use uplang::{parse, up, Value};

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse(
        "\
database {
  url postgres://localhost/app
  pool!int 10
  replicas [
    {
      url postgres://replica-1/app
    }
    {
      url postgres://replica-2/app
    }
  ]
}
allowed_origins [https://a.example, https://b.example]
",
    )?;

    // The whole document, annotations included
    println!("{}\n", serde_json::to_string_pretty(&doc)?);

    // A single value, as plain JSON data
    let database = doc.get("database").map(|n| &n.value);
    println!("{}\n", serde_json::to_string_pretty(&database)?);

    // Values also come back from JSON, with every primitive as text
    let from_json: Value = serde_json::from_str(r#"{"pool": 10, "tls": true}"#)?;
    assert_eq!(from_json, up!({"pool": "10", "tls": "true"}));
    println!("✓ JSON values read back as UP scalars");

    Ok(())
}
