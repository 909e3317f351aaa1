fn main() {
    // Full pipeline in one call
    let result = rpn_rs::calculate("3 + 4 * 2").unwrap_or_else(|e| {
        panic!("{}", e);
    });
    println!("3 + 4 * 2 = {:?}", result);

    // Functions, factorial, and mixed bracket kinds
    let result = rpn_rs::calculate("sqrt [ 16 ] + 5 !").unwrap_or_else(|e| {
        panic!("{}", e);
    });
    println!("sqrt [ 16 ] + 5 ! = {:?}", result);

    // Stage by stage, keeping the postfix form
    let tokens = rpn_rs::lexer::tokenize("( 3 + 4 ) * 2").unwrap();
    let postfix = rpn_rs::convert::infix_to_postfix(&tokens).unwrap();
    let rendered: Vec<&str> = postfix.iter().map(|t| t.as_str()).collect();
    println!("postfix: {}", rendered.join(" "));
    println!("value:   {:?}", rpn_rs::eval::evaluate_postfix(&postfix).unwrap());
}
