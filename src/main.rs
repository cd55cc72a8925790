// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example weighted
fn main() {
    println!("filament-nn: a feed-forward graph of averaging neurons in Rust.");
    println!("Run `cargo run --example weighted` to see a worked evaluation.");
}
