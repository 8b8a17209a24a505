use fifo::{Queue, TryReserveError};

fn main() -> Result<(), TryReserveError> {
    let mut queue = Queue::new();

    queue.push(10)?;
    queue.push(20)?;
    queue.push(30)?;

    match queue.get(1) {
        Some(value) => println!("queue number 2: {}", value),
        None => println!("Invalid index"),
    }

    Ok(())
}
