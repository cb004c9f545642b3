//! Parsing a UP document and walking the result.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use uplang::{parse, Value};

const CONFIG: &str = "\
# Application settings
name My App
version!semver 1.2.0

server {
  host localhost
  port!int 8080
}

features [auth, logging, metrics]

banner!2 ```
  Welcome to My App
  Have a nice day
```
";

fn describe(value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    match value {
        Value::Scalar(text) => println!("{}{:?}", pad, text),
        Value::Block(block) => {
            for (key, inner) in block {
                println!("{}{}:", pad, key);
                describe(inner, indent + 2);
            }
        }
        Value::List(items) => {
            for item in items {
                println!("{}-", pad);
                describe(item, indent + 2);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse(CONFIG)?;

    for node in &doc {
        match &node.type_annotation {
            Some(annotation) => println!("{} (!{}):", node.key, annotation),
            None => println!("{}:", node.key),
        }
        describe(&node.value, 2);
    }

    let port = doc
        .get("server")
        .and_then(|n| n.value.as_block())
        .and_then(|b| b.get("port"))
        .and_then(Value::as_str);
    println!("\nServer port is {:?}", port);

    Ok(())
}
