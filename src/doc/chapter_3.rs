/*!
# Functions

Built-in function names are not case sensitive. A call must have the
right number of arguments of the right types; anything else does not
parse as a call.
*/

pub mod LEFT {
    /*!
    ## `LEFT$(X$, N)` Returns the first N characters of X$.
    ```text
    PRINT left$("HELLO", 2)
    HE
    ```
    An N below zero or past the end of X$ is an `ILLEGAL FUNCTION CALL`.
    */
}

pub mod MID {
    /*!
    ## `MID$(X$, A, B)` Returns the characters of X$ from A up to but not including B.
    Positions count from 0.
    ```text
    PRINT mid$("HELLO", 1, 3)
    EL
    ```
    */
}

pub mod NUM {
    /*!
    ## `NUM$(X)` Returns an integer or float as a string.
    ```text
    PRINT num$(3.0) + "!"
    3.0!
    ```
    */
}

pub mod RANDOM {
    /*!
    ## `RANDOM()` Returns a random integer.
    Any 32-bit value is equally likely. Run with `--seed` to get the
    same numbers every time.
    */
}

pub mod RIGHT {
    /*!
    ## `RIGHT$(X$, N)` Returns the last N characters of X$.
    ```text
    PRINT right$("HELLO", 3)
    LLO
    ```
    */
}

pub mod VAL {
    /*!
    ## `VAL(X$)` Returns the integer written in X$.
    Text that is not an integer is an `ILLEGAL FUNCTION CALL`.
    ```text
    PRINT val("42") + 1
    43
    ```
    */
}

pub mod VAL_FLOAT {
    /*!
    ## `VAL%(X$)` Returns the float written in X$.
    ```text
    PRINT val%("2.5")
    2.5
    ```
    */
}
