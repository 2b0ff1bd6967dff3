use bit_list::{BitList, BitListError};

fn main() {
    println!("=== Bit List Examples ===\n");

    // Example 1: Editing a list in place
    let _ = example_editing();

    // Example 2: Walking with a cursor
    let _ = example_cursor();

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_editing() -> Result<(), BitListError> {
    println!("Example 1: Seat reservations (one bit per seat)");

    let mut seats = BitList::from_slice(&[true, false, true, false, true, false, true, false]);
    println!("  Row:            {:?}", seats);

    // A seat is added in the middle of the row
    seats.insert(3, true)?;
    println!("  After insert:   {:?}", seats);

    // The last seat is taken away
    let removed = seats.remove(seats.len() - 1)?;
    println!("  Removed seat was reserved: {}", removed);

    seats.set(1, true)?;
    println!("  Seat 1 now:     {}", seats.get(1)?);
    println!();

    Ok(())
}

fn example_cursor() -> Result<(), BitListError> {
    println!("Example 2: Cursor traversal");

    let flags = BitList::from_slice(&[false, true, true]);
    let mut cursor = flags.cursor();

    while cursor.advance() {
        println!("  [{:?}] = {}", cursor.position(), cursor.current()?);
    }
    if let Err(e) = cursor.current() {
        println!("  After the end: {}", e);
    }
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    let standard: Vec<bool> = (0..count).map(|i| i % 7 == 0).collect();
    let packed = BitList::from_slice(&standard);

    let standard_bytes = standard.len();
    let packed_bytes = packed.as_bytes().len();
    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} booleans:", count);
    println!("  Vec<bool>: {} bytes", standard_bytes);
    println!("  BitList:   {} bytes", packed_bytes);
    println!("  Savings:   {:.1}%", savings);
}
