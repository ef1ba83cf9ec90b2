/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use clap::{App, Arg};
use dmat_linalg::{determinant, inverse, leibniz_expansion};
use dmat_matrix::{ops, Matrix, RowReduce};
use itertools::Itertools;
use log::{debug, LevelFilter};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        // (the logger may not exist yet)
        for cause in e.iter_chain() {
            eprintln!("ERROR: {}", cause);
        }
        std::process::exit(1);
    });
}

/// `RUST_LOG` is honored; each `-v` raises the floor.
fn init_logger(verbosity: u64) -> FailResult<()> {
    let mut builder = env_logger::Builder::from_default_env();
    match verbosity {
        0 => {},
        1 => { builder.filter_level(LevelFilter::Debug); },
        _ => { builder.filter_level(LevelFilter::Trace); },
    }
    builder.try_init()?;
    Ok(())
}

pub fn demo() {
    wrap_result_main(|| {
        let matches = {
            App::new("dmat-demo")
                .about("Walks through the matrix operations on a few small examples.")
                .args(&[
                    Arg::with_name("verbose")
                        .short("v").long("verbose").multiple(true)
                        .help("log reduction steps (-v for pivots, -vv for every row operation)"),
                    Arg::with_name("steps")
                        .long("steps")
                        .help("also row-reduce a handful of textbook exercises"),
                    Arg::with_name("expansion")
                        .long("expansion").takes_value(true).value_name("N")
                        .help("print the symbolic Leibniz expansion of an NxN determinant"),
                ])
                .get_matches()
        };
        init_logger(matches.occurrences_of("verbose"))?;

        let expansion = match matches.value_of("expansion") {
            Some(s) => Some(s.parse::<usize>()?),
            None => None,
        };

        tour()?;
        if matches.is_present("steps") {
            textbook_reductions()?;
        }
        if let Some(n) = expansion {
            println!("\nExpansion of a {0}x{0} determinant:", n);
            println!("{}", leibniz_expansion(n)?);
        }
        Ok(())
    });
}

fn tour() -> FailResult<()> {
    let m1 = Matrix::new(3, 3, vec![
        0.0, 2.0, 1.0,
        2.0, 0.0, 0.0,
        0.0, 3.0, 2.0,
    ])?;
    let m2 = Matrix::new(3, 3, vec![
        10.0, 11.0, 12.0,
        13.0, 14.0, 15.0,
        16.0, 17.0, 18.0,
    ])?;

    println!("\nSize of Matrix 1:");
    println!("{}", m1.dims());

    println!("Matrix 1:");
    println!("{}", m1);
    println!("\nMatrix 2:");
    println!("{}", m2);

    println!("\nSum of Matrix 1 and 2:");
    println!("{}", ops::add(&m1, &m2)?);

    println!("\nProduct of Matrix 1 and 2:");
    println!("{}", ops::multiply(&m1, &m2)?);

    let inv = inverse(&m1)?;
    println!("\nInverse Matrix:");
    println!("{}", inv);

    let identity = Matrix::identity(3)?;
    println!("\nNew 3x3 Identity Matrix: ");
    println!("{}", identity);

    if ops::multiply(&m1, &inv)?.equals(&identity)? {
        println!("\n m1 * inv == identity");
    }

    println!("\nTransposed Matrix 1:");
    println!("{}", m1.transpose());

    println!("\nDeterminant of Matrix 1:");
    println!("{}", determinant(&m1)?);

    println!("\nMatrix 1 scaled by 2:");
    println!("{}", ops::scale(2.0, &m1));

    println!("\nElement at (2,3) in Matrix 1:");
    println!("{}", m1.get(2, 3)?);

    println!("\nNew 3x2 Zero Matrix: ");
    println!("{}", Matrix::zeros(3, 2)?);
    Ok(())
}

fn textbook_reductions() -> FailResult<()> {
    let exercises: Vec<(&str, Matrix)> = vec![
        ("1.1", Matrix::new(3, 4, vec![
            1.0, 2.0, 3.0, 2.0,
            3.0, 4.0, 5.0, 6.0,
            7.0, 8.0, 6.0, 11.0,
        ])?),
        ("1.3", Matrix::new(3, 4, vec![
            1.0, 2.0, 3.0, -1.0,
            3.0, 4.0, 5.0, 1.0,
            6.0, 7.0, 8.0, 4.0,
        ])?),
        ("1.6", Matrix::new(3, 6, vec![
            1.0, 1.0, -1.0, 2.0, 1.0, 0.0,
            0.0, 1.0, 1.0, 1.0, -3.0, 1.0,
            0.0, 0.0, 0.0, 1.0, -1.0, 2.0,
        ])?),
        ("exercise 1.1", Matrix::new(4, 5, vec![
            1.0, 1.0, 1.0, 0.0, 1.0,
            1.0, 1.0, 0.0, 1.0, 1.0,
            1.0, 0.0, 1.0, 1.0, 1.0,
            0.0, 1.0, 1.0, 1.0, 1.0,
        ])?),
        ("exercise 1.2", Matrix::new(3, 4, vec![
            1.0, 2.0, -1.0, 1.0,
            1.0, 2.0, 1.0, 5.0,
            1.0, 2.0, 2.0, 7.0,
        ])?),
    ];

    for (label, a) in exercises {
        debug!("reducing {} ({})", label, a.dims());
        println!("----- {}", label);
        print!("a = \n{}", a);

        let reduction = a.row_reduce_decomp();
        print!("b = \n{}", reduction.matrix);
        println!("pivot columns: {}", reduction.pivot_columns.iter().join(", "));
        if reduction.terminated_early {
            println!("(ran out of columns; entries above the pivots were left in place)");
        }
    }
    Ok(())
}
