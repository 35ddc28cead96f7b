/// C-like program the driver scans when no input file is given.
///
/// The odd indentation is deliberate: it gives the normalizer something to
/// remove.
pub const SAMPLE_SOURCE: &str = r#"
    int main() {
    int x=10;float y=3.14;

    if(x>0)
    {
        printf("x is positive\n");
        return x*y;
    }
    else
    {
        printf("x is non-positive\n");
        return 0;
    }
}
    "#;
