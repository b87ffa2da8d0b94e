macro_rules! test_describe {
    ($input:literal => err) => { assert!(crate::parser::parse($input).is_err()); };
    ($input:literal => $output:literal) => {
        assert_eq!(crate::describe::describe_number(&crate::parser::parse($input).unwrap()), $output);
    };
}

macro_rules! test_name {
    ($n:expr => $output:literal) => {
        assert_eq!(crate::names::name_integer(&num::BigInt::from($n)), $output);
    };
}

pub(crate) use test_describe;
pub(crate) use test_name;
