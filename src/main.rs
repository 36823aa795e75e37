use serde_json::json;
use std::io::{self, Read};
use tagscan::detect_tags;

fn main() {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read stdin");
    let (output, tags) = detect_tags(&input, &[]);
    println!("{}", json!({ "output": output, "tags": tags }));
}
