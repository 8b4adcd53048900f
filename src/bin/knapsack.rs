use dynprog::dynamic::knapsack_max_value;

fn report(best: i64) -> String {
    format!("Knapsack value is {best}")
}

fn main() -> dynprog::Result<()> {
    let values = [20, 5, 10, 40, 15, 25];
    let weights = [1, 2, 3, 8, 7, 4];
    let capacity = 10;

    let best = knapsack_max_value(&values, &weights, capacity)?;
    println!("{}", report(best));
    Ok(())
}
