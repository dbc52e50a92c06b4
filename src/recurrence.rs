//! 与序列无关的两个兔子繁殖递推，以及孟德尔第一定律的显性概率。
//!
//! 递推按月迭代计算，不使用递归。

use crate::error::{Error, Result};

/// `fib` 接受的最大月份
pub const FIB_MAX_MONTHS: u64 = 40;
/// `fibd` 接受的最大月份
pub const FIBD_MAX_MONTHS: u64 = 100;
/// `fibd` 接受的最长寿命
pub const FIBD_MAX_LIFESPAN: usize = 20;

fn overflow(what: &str, n: u64) -> Error {
    Error::InvalidParameter(format!("{} overflows at month {}", what, n))
}

/// 兔子对数：F(1) = F(2) = 1，F(n) = F(n-1) + k * F(n-2)
pub fn fib(n: u64, k: u64) -> Result<u128> {
    if n == 0 || n > FIB_MAX_MONTHS {
        return Err(Error::InvalidParameter(format!(
            "month n must be in 1..={}, got {}",
            FIB_MAX_MONTHS, n
        )));
    }
    let (mut prev, mut cur) = (1u128, 1u128);
    for month in 3..=n {
        let next = prev
            .checked_mul(u128::from(k))
            .and_then(|litter| cur.checked_add(litter))
            .ok_or_else(|| overflow("rabbit recurrence", month))?;
        prev = cur;
        cur = next;
    }
    Ok(cur)
}

/// 寿命为 m 个月的兔子在第 n 个月末的总对数
pub fn fibd(n: u64, m: usize) -> Result<u128> {
    if n == 0 || n > FIBD_MAX_MONTHS || m == 0 || m > FIBD_MAX_LIFESPAN {
        return Err(Error::InvalidParameter(format!(
            "month n must be in 1..={} and lifespan m in 1..={}, got n={} m={}",
            FIBD_MAX_MONTHS, FIBD_MAX_LIFESPAN, n, m
        )));
    }

    // ages[i]：年龄为 i 个月的兔子对数，ages[0] 为新生
    let mut ages = vec![0u128; m];
    ages[0] = 1;
    for month in 2..=n {
        let mut newborns = 0u128;
        for &pairs in &ages[1..] {
            newborns = newborns
                .checked_add(pairs)
                .ok_or_else(|| overflow("mortal rabbit recurrence", month))?;
        }
        // 最老的一批死亡，其余年龄加一
        ages.rotate_right(1);
        ages[0] = newborns;
    }

    ages.iter()
        .try_fold(0u128, |acc, &pairs| acc.checked_add(pairs))
        .ok_or_else(|| overflow("mortal rabbit recurrence", n))
}

/// k 个显性纯合、m 个杂合、n 个隐性纯合个体中随机选两个交配，
/// 后代带有显性等位基因的概率
pub fn dominant_probability(k: u64, m: u64, n: u64) -> Result<f64> {
    let total = k
        .checked_add(m)
        .and_then(|s| s.checked_add(n))
        .ok_or_else(|| Error::InvalidParameter("population size overflows".to_string()))?;
    if total < 2 {
        return Err(Error::InputArity {
            operation: "Mendel's first law",
            required: 2,
            got: total as usize,
        });
    }

    let (m, n, total) = (m as f64, n as f64, total as f64);
    let pairs = total * (total - 1.0);
    // 后代为隐性纯合的概率
    let recessive = (n * (n - 1.0) + m * n + m * (m - 1.0) / 4.0) / pairs;
    Ok(1.0 - recessive)
}
