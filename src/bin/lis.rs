use std::fmt::Display;

use dynprog::dynamic::longest_increasing_subsequence;

fn report<T: Display>(values: &[T]) -> String {
    let line: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    line.join(" ")
}

fn main() -> dynprog::Result<()> {
    let numbers = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

    let lis = longest_increasing_subsequence(&numbers)?;
    println!("{}", report(&lis));
    Ok(())
}
