use pack::pack;

fn main() {
    let refs;
    {
        let x = 5;
        refs = pack!(&x);
    }
    drop(refs);
}
