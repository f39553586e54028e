use near_sdk::Balance;

pub fn to_yocto(value: &str) -> u128 {
    let vals: Vec<_> = value.split('.').collect();
    let part1 = vals[0].parse::<u128>().unwrap() * 10u128.pow(24);
    if vals.len() > 1 {
        let power = vals[1].len() as u32;
        let part2 = vals[1].parse::<u128>().unwrap() * 10u128.pow(24 - power);
        part1 + part2
    } else {
        part1
    }
}

/// Checks that two amounts are within epsilon
pub fn almost_equal(left: Balance, right: Balance, epsilon: Balance) -> bool {
    println!("{} ~= {}", left, right);
    if left > right {
        (left - right) < epsilon
    } else {
        (right - left) < epsilon
    }
}
