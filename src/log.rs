// trace output, compiled out unless the `log` feature is on
macro_rules! log {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        {
            eprintln!("minmaxheap: {}", format_args!($($arg)*));
        }
    };
}
